//! Event-handler helpers for UI callbacks.

/// A UI event whose default behaviour can be suppressed.
pub trait UiEvent {
    fn prevent_default(&mut self);
}

/// Wrap `handler` so the event's default behaviour is suppressed before the
/// handler sees it.
pub fn prevent_default<E, F>(mut handler: F) -> impl FnMut(&mut E)
where
    E: UiEvent + ?Sized,
    F: FnMut(&mut E),
{
    move |event: &mut E| {
        event.prevent_default();
        handler(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockEvent {
        calls: Vec<&'static str>,
        default_prevented: bool,
    }

    impl UiEvent for MockEvent {
        fn prevent_default(&mut self) {
            self.default_prevented = true;
            self.calls.push("prevent_default");
        }
    }

    #[test]
    fn test_prevent_default_runs_before_handler_once_each() {
        let mut wrapped = prevent_default(|e: &mut MockEvent| {
            assert!(e.default_prevented, "default must be suppressed first");
            e.calls.push("handler");
        });

        let mut event = MockEvent::default();
        wrapped(&mut event);
        assert_eq!(event.calls, vec!["prevent_default", "handler"]);
    }

    #[test]
    fn test_wrapper_is_reusable() {
        let mut invocations = 0;
        {
            let mut wrapped = prevent_default(|_: &mut MockEvent| invocations += 1);
            wrapped(&mut MockEvent::default());
            wrapped(&mut MockEvent::default());
        }
        assert_eq!(invocations, 2);
    }
}
