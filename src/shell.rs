use crate::command::Command;
use crate::error::Result;
use crate::map::LongMap;
use slog::debug;
use slog::Logger;
use std::io::BufRead;
use std::io::Write;

/// Runs `longmap` scripts against a map of strings.
pub struct Shell<M: LongMap<String>> {
    map: M,
    log: Logger,
}

impl<M: LongMap<String>> Shell<M> {
    pub fn new(map: M, log: Logger) -> Self {
        Self { map, log }
    }

    /// Execute every command read from `input`, writing results to `output`.
    /// Stops at the first line that fails to parse.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            debug!(self.log, "executing"; "line" => number + 1, "command" => line);
            let command = line.parse::<Command>()?;
            self.execute(command, &mut output)?;
        }
        output.flush()?;
        Ok(())
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn into_inner(self) -> M {
        self.map
    }

    fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> Result<()> {
        match command {
            Command::Put(key, value) => {
                self.map.put(key, value);
            }
            Command::Get(key) => match self.map.get(key) {
                Some(value) => writeln!(output, "{}", value)?,
                None => writeln!(output, "Key not found")?,
            },
            Command::Remove(key) => match self.map.remove(key) {
                Some(value) => writeln!(output, "{}", value)?,
                None => writeln!(output, "Key not found")?,
            },
            Command::ContainsKey(key) => writeln!(output, "{}", self.map.contains_key(key))?,
            Command::ContainsValue(value) => {
                writeln!(output, "{}", self.map.contains_value(&value))?
            }
            Command::Keys => writeln!(output, "{:?}", self.map.keys())?,
            Command::Values => writeln!(output, "{:?}", self.map.values())?,
            Command::Size => writeln!(output, "{}", self.map.size())?,
            Command::IsEmpty => writeln!(output, "{}", self.map.is_empty())?,
            Command::Clear => {
                debug!(self.log, "clearing"; "size" => self.map.size());
                self.map.clear();
            }
        }
        Ok(())
    }
}
