// File: src/sink.rs
// Purpose: Submission sinks - where accepted StudentRecords go

use std::io::Write;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use tracing::info;

use crate::record::StudentRecord;

/// Receives each accepted record. What it does with it is its own business.
pub trait SubmissionSink {
    fn emit(&mut self, record: &StudentRecord) -> Result<()>;
}

/// Logs accepted records at `info`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn emit(&mut self, record: &StudentRecord) -> Result<()> {
        info!(
            name = %record.name,
            email = %record.email,
            age = %record.age,
            gender = %record.gender,
            file = %record.file.name,
            "student registration accepted"
        );
        Ok(())
    }
}

/// Writes each record as one line of JSON
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonSink<W> {
    fn emit(&mut self, record: &StudentRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record).context("Failed to serialize record")?;
        self.writer
            .write_all(b"\n")
            .and_then(|_| self.writer.flush())
            .context("Failed to write record")?;
        Ok(())
    }
}

/// Keeps every record in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub records: Vec<StudentRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionSink for MemorySink {
    fn emit(&mut self, record: &StudentRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn emit(&mut self, record: &StudentRecord) -> Result<()> {
        (**self).emit(record)
    }
}

/// Shared sink, so many controllers can feed one destination
impl<S: SubmissionSink> SubmissionSink for Arc<Mutex<S>> {
    fn emit(&mut self, record: &StudentRecord) -> Result<()> {
        let mut sink = self
            .lock()
            .map_err(|_| anyhow!("submission sink lock poisoned"))?;
        sink.emit(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::FileDescriptor;
    use chrono::NaiveDate;
    use registration_types::{Age, EmailAddress, Gender, Password, PhoneNumber, StudentName};

    fn record() -> StudentRecord {
        StudentRecord {
            name: StudentName::try_new("Alicia Keys".to_string()).unwrap(),
            email: EmailAddress::try_new("alicia@school.edu".to_string()).unwrap(),
            password: Password::try_new("abc123".to_string()).unwrap(),
            age: Age::try_new(21).unwrap(),
            gender: Gender::Female,
            phone_no: PhoneNumber::try_new("123-456-7890".to_string()).unwrap(),
            dob: NaiveDate::from_ymd_opt(2003, 2, 14).unwrap(),
            checkbox: true,
            file: FileDescriptor::new("me.png", 2048, "image/png"),
        }
    }

    #[test]
    fn test_json_sink_writes_one_line_per_record() {
        let mut sink = JsonSink::new(Vec::new());
        sink.emit(&record()).unwrap();
        sink.emit(&record()).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);

        let json: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(json["name"], "Alicia Keys");
        assert_eq!(json["phoneNo"], "123-456-7890");
        assert_eq!(json["age"], 21);
        assert_eq!(json["dob"], "2003-02-14");
        assert_eq!(json["file"]["type"], "image/png");

        let back: StudentRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(back, record());
    }

    #[test]
    fn test_shared_memory_sink() {
        let shared = Arc::new(Mutex::new(MemorySink::new()));
        let mut boxed: Box<dyn SubmissionSink + Send> = Box::new(shared.clone());

        boxed.emit(&record()).unwrap();
        assert_eq!(shared.lock().unwrap().records.len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_records() {
        assert!(TracingSink.emit(&record()).is_ok());
    }
}
