//! Interactive menu: reads choices and numbers, calls one engine operation
//! at a time, and prints its outcome.
//!
//! Generic over any `BufRead`/`Write` pair so sessions can be scripted.
//! End of input ends the session the same way choosing `exit` does.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::Span;

use crate::error::{Error, Result};
use crate::model::{Growth, Item};
use crate::queue::QueueEngine;
use crate::telemetry::{metrics, queue as spans};

const MENU: &str = "Menu:\n1. insert\n2. delete\n3. display\n4. exit";

pub struct Menu<R, W> {
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            json: false,
        }
    }

    /// Print `display` results as JSON snapshots instead of a table.
    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask once for the initial capacity.
    ///
    /// # Errors
    ///
    /// `InvalidNumber` for unparsable input and `InvalidCapacity` for a
    /// size that is not positive; the session cannot start either way.
    pub fn read_initial_capacity(&mut self) -> Result<usize> {
        let Some(line) = self.prompt_line("Enter the initial size of Queue : ")? else {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no initial size given",
            )));
        };
        let answer = line.trim();
        let size: i64 = answer
            .parse()
            .map_err(|_| Error::InvalidNumber(answer.to_string()))?;
        usize::try_from(size)
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or(Error::InvalidCapacity(size))
    }

    /// Run the menu loop against `queue` until `exit` or end of input.
    pub fn run<Q: QueueEngine>(&mut self, queue: &mut Q) -> Result<()> {
        let span = spans::start_session_span(queue.kind(), queue.capacity());
        metrics::record_capacity(queue.kind(), queue.capacity());

        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt_line("Enter your choice : ")? else {
                break;
            };
            match line.trim() {
                "1" => {
                    if !self.insert(queue, &span)? {
                        break;
                    }
                }
                "2" => self.delete(queue, &span)?,
                "3" => self.display(queue, &span)?,
                "4" => break,
                _ => writeln!(self.output, "Enter a valid choice...!")?,
            }
        }

        span.in_scope(|| tracing::info!("session ended"));
        Ok(())
    }

    /// Returns `false` when input ran out mid-operation.
    fn insert<Q: QueueEngine>(&mut self, queue: &mut Q, span: &Span) -> Result<bool> {
        let kind = queue.kind();
        let Some(item) = self.prompt_number::<Item>("Enter item to insert : ")? else {
            return Ok(false);
        };

        let capacity = queue.capacity();
        let mut prompt_error = None;
        let mut eof = false;
        let result = queue.insert_with(item, |capacity| match self.ask_growth(capacity) {
            Ok(Some(growth)) => growth,
            Ok(None) => {
                eof = true;
                Growth::Decline
            }
            Err(e) => {
                prompt_error = Some(e);
                Growth::Decline
            }
        });
        if let Some(e) = prompt_error {
            return Err(e);
        }

        let label = match result {
            Ok(inserted) => {
                if let Some(new_capacity) = inserted.grown_to {
                    spans::record_growth(span, capacity, new_capacity);
                    metrics::record_growth(kind, "ok", Some(new_capacity));
                    writeln!(self.output, "Queue size increased to {new_capacity}")?;
                }
                writeln!(self.output, "Successfully inserted: {}", inserted.item)?;
                "ok"
            }
            Err(Error::QueueFull { .. }) => {
                if !eof {
                    writeln!(self.output, "Item not inserted.")?;
                }
                "full"
            }
            Err(Error::InvalidNewSize { current, .. }) => {
                metrics::record_growth(kind, "invalid_size", None);
                writeln!(self.output, "Invalid size. Must be > {current}")?;
                "invalid_size"
            }
            Err(Error::AllocationFailed { .. }) => {
                metrics::record_growth(kind, "alloc_failed", None);
                writeln!(
                    self.output,
                    "Memory reallocation failed... Please try again later...!"
                )?;
                "alloc_failed"
            }
            Err(e) => return Err(e),
        };

        spans::record_operation(span, "insert", label);
        metrics::record_operation(kind, "insert", label);
        Ok(!eof)
    }

    /// Offer growth on a full queue. `None` means input ran out.
    fn ask_growth(&mut self, capacity: usize) -> Result<Option<Growth>> {
        writeln!(self.output, "Queue is full...")?;
        let Some(answer) = self.prompt_line("Do you want to reallocate memory? (y/n) : ")? else {
            return Ok(None);
        };
        if !matches!(answer.trim().chars().next(), Some('y' | 'Y')) {
            return Ok(Some(Growth::Decline));
        }

        let Some(requested) = self.prompt_number::<i64>("Enter new size : ")? else {
            return Ok(None);
        };
        // Non-positive sizes map to 0, which every engine rejects.
        let requested = usize::try_from(requested).unwrap_or(0);
        tracing::debug!(capacity, requested, "growth requested");
        Ok(Some(Growth::To(requested)))
    }

    fn delete<Q: QueueEngine>(&mut self, queue: &mut Q, span: &Span) -> Result<()> {
        let label = match queue.delete() {
            Ok(item) => {
                writeln!(self.output, "Successfully deleted: {item}")?;
                "ok"
            }
            Err(Error::QueueEmpty) => {
                writeln!(self.output, "Queue is empty...")?;
                "empty"
            }
            Err(e) => return Err(e),
        };
        spans::record_operation(span, "delete", label);
        metrics::record_operation(queue.kind(), "delete", label);
        Ok(())
    }

    fn display<Q: QueueEngine>(&mut self, queue: &Q, span: &Span) -> Result<()> {
        let snapshot = queue.snapshot();
        let label = if snapshot.is_empty() { "empty" } else { "ok" };

        if self.json {
            let json = serde_json::to_string(&snapshot)
                .map_err(|e| Error::Other(format!("failed to encode snapshot: {e}")))?;
            writeln!(self.output, "{json}")?;
        } else if snapshot.is_empty() {
            writeln!(self.output, "Queue is empty...Please insert an item...")?;
        } else {
            writeln!(self.output, "Queue :")?;
            for item in &snapshot.items {
                write!(self.output, "| {item:>3} ")?;
            }
            writeln!(self.output)?;
            writeln!(
                self.output,
                "Front = {}, Rear = {}",
                index_or_sentinel(snapshot.front),
                index_or_sentinel(snapshot.rear)
            )?;
        }

        spans::record_operation(span, "display", label);
        metrics::record_operation(queue.kind(), "display", label);
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Prompt until the line parses as `T`. `None` on end of input.
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.output, "Enter a valid number...!")?,
            }
        }
    }
}

fn index_or_sentinel(index: Option<usize>) -> String {
    index.map_or_else(|| "-1".to_string(), |i| i.to_string())
}
