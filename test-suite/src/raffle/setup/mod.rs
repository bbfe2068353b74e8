pub mod execute_msg;
pub mod helpers;
