use savdsk::SavDskErrorConvertible;
use std::fmt::Formatter;
use std::path::Path;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    Open,
    Create,
    Read,
    Write,
    Commit,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ToolError {
    operation: Operation,
    path: String,
    message: String,
}

impl ToolError {
    pub fn new(operation: Operation, path: &Path, message: &str) -> Self {
        return ToolError {
            operation,
            path: path.display().to_string(),
            message: String::from(message),
        };
    }

    pub fn operation(&self) -> Operation {
        return self.operation;
    }

    pub fn get_path(&self) -> String {
        return self.path.clone();
    }
}

impl SavDskErrorConvertible for ToolError {}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let action = match self.operation {
            Operation::Open => "can't open",
            Operation::Create => "can't create",
            Operation::Read => "read error",
            Operation::Write => "write error",
            Operation::Commit => "can't replace",
        };

        return write!(f, "{} : \"{}\" ({})", action, self.path, self.message);
    }
}
