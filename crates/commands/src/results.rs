//! Results shared by every command that has no dedicated answer.

use simctl_protocol::command_result;

command_result! {
    /// The command completed.
    pub struct SuccessResult {
        name: "SuccessResult",
        documentation: "The command completed successfully.",
        fields {}
    }
}

command_result! {
    /// The command was received but could not be carried out.
    pub struct FailureResult {
        name: "FailureResult",
        documentation: "The command failed. Message explains why.",
        success: false,
        fields {
            message / set_message: String = "Message",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use simctl_protocol::{command, Command, CommandResult, Message, Permission};
    use std::sync::Arc;

    command! {
        struct Start {
            name: "Start",
            documentation: "Start the simulation.",
            permission: Permission::IDLE,
            fields {}
        }
    }

    #[test]
    fn failure_carries_message_and_is_not_success() {
        let cmd: Arc<dyn Command> = Arc::new(Start::default());
        let failure = FailureResult::new(cmd, "no license".to_string());
        assert!(!failure.is_success());
        assert!(failure.is_valid());
        assert_eq!(failure.message().unwrap(), "no license");
        assert_eq!(
            failure.to_json(),
            json!({
                "CmdName": "FailureResult",
                "RelatedCommand": {"CmdName": "Start"},
                "Message": "no license"
            })
        );
    }

    #[test]
    fn success_is_success() {
        let cmd: Arc<dyn Command> = Arc::new(Start::default());
        let success = SuccessResult::new(cmd);
        assert!(success.is_success());
        assert_eq!(success.related_command().unwrap().name(), "Start");
    }
}
