//! Logging wrapper - observability for delivered pin events.

use pinrelay_core::{PinEvent, PinHandler};

/// A handler wrapper that logs every event before forwarding it.
///
/// Uses `tracing` when the `tracing` feature is enabled; otherwise it is a
/// plain pass-through.
///
/// # Example
///
/// ```rust,ignore
/// use pinrelay::hooks::LoggingHandler;
///
/// static BUTTON: LoggingHandler<Button> = LoggingHandler::named(Button::new(), "user_button");
/// GPIO.register_falling(&BUTTON, 15)?;
/// ```
pub struct LoggingHandler<H> {
    inner: H,
    name: &'static str,
}

impl<H> LoggingHandler<H> {
    /// Wrap `inner` with a default name.
    pub const fn new(inner: H) -> Self {
        Self {
            inner,
            name: "pin",
        }
    }

    /// Wrap `inner` with a custom name.
    ///
    /// The name identifies the handler in log output.
    pub const fn named(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H: PinHandler> PinHandler for LoggingHandler<H> {
    fn deliver(&self, event: PinEvent) {
        #[cfg(feature = "tracing")]
        {
            tracing::debug!(name = %self.name, pin = event.pin, kind = ?event.kind, "pin event");
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = self.name;
        }

        self.inner.deliver(event);
    }

    fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHandler;
    use pinrelay_core::EventKind;

    #[test]
    fn test_logging_handler_forwards() {
        let handler = LoggingHandler::new(RecordingHandler::new());
        handler.deliver(PinEvent::new(2, EventKind::LevelHigh));

        assert_eq!(
            handler.inner().events(),
            vec![PinEvent::new(2, EventKind::LevelHigh)]
        );
    }

    #[test]
    fn test_logging_handler_forwards_readiness() {
        let handler = LoggingHandler::named(RecordingHandler::new(), "button");
        assert!(handler.is_ready());

        handler.inner().set_ready(false);
        assert!(!handler.is_ready());
    }
}
