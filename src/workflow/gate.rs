// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manual pacing between walkthrough steps

use crate::constants::PAUSE_PROMPT;
use std::future::Future;
use std::io;
use tokio::io::{stdin, AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Blocks the walkthrough until the operator lets it continue
pub trait Gate {
    /// Prompt printed before waiting; `None` means never pause
    fn prompt(&self) -> Option<&'static str>;

    fn wait(&mut self) -> impl Future<Output = io::Result<()>> + Send;
}

/// Waits for one line of input, stdin unless built with `from_reader`. The
/// content is ignored and end of input also continues.
pub struct StdinGate<R = BufReader<Stdin>> {
    reader: R,
}

impl StdinGate {
    pub fn new() -> Self {
        Self::from_reader(BufReader::new(stdin()))
    }
}

impl Default for StdinGate {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> StdinGate<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: AsyncBufRead + Unpin + Send> Gate for StdinGate<R> {
    fn prompt(&self) -> Option<&'static str> {
        Some(PAUSE_PROMPT)
    }

    async fn wait(&mut self) -> io::Result<()> {
        let mut line = String::new();
        self.reader.read_line(&mut line).await?;
        Ok(())
    }
}

/// Runs straight through
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPause;

impl Gate for NoPause {
    fn prompt(&self) -> Option<&'static str> {
        None
    }

    async fn wait(&mut self) -> io::Result<()> {
        Ok(())
    }
}
