pub mod base_commands;
pub mod update_cmd;
