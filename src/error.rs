/// Errors returned by a single [StackView](crate::data_structures::StackView).
///
/// The queue never hands these to its callers, they are either prevented by its guards or
/// turned into a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum StackError {
    /// The view already holds `capacity` elements.
    #[error("stack overflow, capacity:{capacity}")]
    Overflow { capacity: usize },
    /// The view holds no elements.
    #[error("stack underflow")]
    Underflow,
}

/// Errors returned by [TwoStackQueue](crate::data_structures::TwoStackQueue).
///
/// Both are recoverable, the queue is left untouched when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum QueueError {
    /// The queue already holds `capacity` elements.
    #[error("queue is full, capacity:{capacity}")]
    Full { capacity: usize },
    /// The queue holds no elements.
    #[error("queue is empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            StackError::Overflow { capacity: 3 }.to_string(),
            "stack overflow, capacity:3"
        );
        assert_eq!(StackError::Underflow.to_string(), "stack underflow");
        assert_eq!(
            QueueError::Full { capacity: 9 }.to_string(),
            "queue is full, capacity:9"
        );
        assert_eq!(QueueError::Empty.to_string(), "queue is empty");
    }

    #[test]
    fn test_is_std_error() {
        fn boxed(e: impl std::error::Error + 'static) -> Box<dyn std::error::Error> {
            Box::new(e)
        }
        assert_eq!(boxed(QueueError::Empty).to_string(), "queue is empty");
        assert_eq!(boxed(StackError::Underflow).to_string(), "stack underflow");
    }
}
