/// Progress and error output, injected instead of a process-wide
/// logger so tests can capture it.
pub trait Reporter {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}
