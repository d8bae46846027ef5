pub mod path_utils;
pub mod spam_log;
