//! Compile-time limits for the logging subsystem

pub mod compile_time {
    pub mod logging {
        /// Maximum events retained by an in-memory logger
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Log messages longer than this are truncated before emission
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;
    }
}
