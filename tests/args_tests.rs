#[cfg(test)]
mod args_tests {
    use clap::Parser;
    use std::path::PathBuf;
    use QueueBlaster::config::publisher::Args;
    use QueueBlaster::publisher_logic::PublishPolicy;
    use QueueBlaster::utils::LogFormat;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["publisher"]);
        assert_eq!(args.config, PathBuf::from("./config.json"));
        assert_eq!(args.message, PathBuf::from("./message.json"));
        assert_eq!(args.on_publish_error, PublishPolicy::BestEffort);
        assert_eq!(args.log_format, LogFormat::Text);
        assert!(!args.pause_on_exit);
    }

    #[test]
    fn test_parse_all_args() {
        let args = Args::parse_from([
            "publisher",
            "-c",
            "/etc/blaster/config.json",
            "-m",
            "payload.bin",
            "--on-publish-error",
            "fail-fast",
            "--log-format",
            "json",
            "--pause-on-exit",
        ]);
        assert_eq!(args.config, PathBuf::from("/etc/blaster/config.json"));
        assert_eq!(args.message, PathBuf::from("payload.bin"));
        assert_eq!(args.on_publish_error, PublishPolicy::FailFast);
        assert_eq!(args.log_format, LogFormat::Json);
        assert!(args.pause_on_exit);
    }

    #[test]
    fn test_unknown_policy_is_rejected() {
        let result = Args::try_parse_from(["publisher", "--on-publish-error", "retry"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::InvalidValue
        );
    }
}
