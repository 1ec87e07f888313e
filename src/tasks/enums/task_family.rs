use std::fmt;

/// Upstream API shape a task is sent to, decided by the model name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskFamily {
    /// `/api/v1/jobs/createTask`
    Default,
    /// `/api/v1/runway/generate`
    Runway,
}

impl TaskFamily {
    pub fn from_model(model: &str) -> Self {
        if model.to_lowercase().contains("runway") {
            Self::Runway
        } else {
            Self::Default
        }
    }

    pub fn value(&self) -> &'static str {
        match *self {
            Self::Default => "jobs",
            Self::Runway => "runway",
        }
    }
}

impl fmt::Display for TaskFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::TaskFamily;

    #[test]
    fn runway_is_matched_anywhere_in_any_case() {
        assert_eq!(TaskFamily::from_model("runway-gen2"), TaskFamily::Runway);
        assert_eq!(TaskFamily::from_model("Runway"), TaskFamily::Runway);
        assert_eq!(TaskFamily::from_model("my-RUNWAY-aleph"), TaskFamily::Runway);
    }

    #[test]
    fn everything_else_is_default() {
        assert_eq!(TaskFamily::from_model("veo3_fast"), TaskFamily::Default);
        assert_eq!(
            TaskFamily::from_model("bytedance/v1-pro-image-to-video"),
            TaskFamily::Default
        );
        assert_eq!(TaskFamily::from_model("run-way"), TaskFamily::Default);
    }
}
