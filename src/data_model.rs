/// Opaque payload published to every configured queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message(Vec<u8>);

impl Message {
    /// Returns `None` for an empty payload; a message is never empty.
    pub fn new(payload: Vec<u8>) -> Option<Self> {
        if payload.is_empty() {
            None
        } else {
            Some(Message(payload))
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of one publish attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutcome {
    pub queue_name: String,
    pub success: bool,
    pub error: Option<String>,
}

impl PublishOutcome {
    pub fn delivered(queue_name: &str) -> Self {
        PublishOutcome {
            queue_name: queue_name.to_string(),
            success: true,
            error: None,
        }
    }

    pub fn failed(queue_name: &str, error: String) -> Self {
        PublishOutcome {
            queue_name: queue_name.to_string(),
            success: false,
            error: Some(error),
        }
    }
}

/// Per-queue outcomes of one run, in the order the queues were attempted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishReport {
    pub outcomes: Vec<PublishOutcome>,
}

impl PublishReport {
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success).count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    pub fn failed_queues(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.queue_name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_is_not_a_message() {
        assert!(Message::new(Vec::new()).is_none());
        let msg = Message::new(b"hi".to_vec()).unwrap();
        assert_eq!(msg.as_bytes(), b"hi");
        assert_eq!(msg.len(), 2);
    }

    #[test]
    fn test_report_counts() {
        let report = PublishReport {
            outcomes: vec![
                PublishOutcome::delivered("a"),
                PublishOutcome::failed("b", "boom".to_string()),
                PublishOutcome::delivered("c"),
            ],
        };
        assert_eq!(report.attempted(), 3);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert_eq!(report.failed_queues(), vec!["b"]);
    }
}
