use letter_stats_shared_kernel::Result;

/// Line-oriented destination for rendered reports (console, file, log).
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_owned());
        Ok(())
    }
}
