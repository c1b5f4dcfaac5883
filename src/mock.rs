//! Scripted register service for tests.
//!
//! Connections replay a shared list of expected peeks and pokes, in order,
//! and the connector counts how many connections are still alive so tests
//! can check that a handle released its connection.

use std::io::{self, ErrorKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use embedded_hal_mock::{common::Generic, MockError};

use crate::config::Endpoint;
use crate::error::{Error, Result};
use crate::transport::{Connect, RegisterAccess, REGISTER_BITS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Peek,
    Poke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    kind: Kind,
    address: u32,
    value: u32,
    error: Option<MockError>,
    protocol_error: Option<String>,
}

impl Transaction {
    pub fn peek(address: u32, reply: u32) -> Self {
        Self {
            kind: Kind::Peek,
            address,
            value: reply,
            error: None,
            protocol_error: None,
        }
    }

    pub fn poke(address: u32, value: u32) -> Self {
        Self {
            kind: Kind::Poke,
            address,
            value,
            error: None,
            protocol_error: None,
        }
    }

    pub fn with_error(mut self, error: MockError) -> Self {
        self.error = Some(error);
        self
    }

    /// Replies with a malformed message instead of completing.
    pub fn with_protocol_error(mut self, reason: &str) -> Self {
        self.protocol_error = Some(reason.to_string());
        self
    }

    fn fail(&self) -> Result<()> {
        if let Some(reason) = &self.protocol_error {
            return Err(Error::Protocol(reason.clone()));
        }
        match &self.error {
            Some(MockError::Io(kind)) => Err(Error::Transport((*kind).into())),
            _ => Ok(()),
        }
    }
}

#[derive(Debug)]
pub struct Registers {
    expected: Generic<Transaction>,
    live: Arc<AtomicUsize>,
}

impl Registers {
    fn next(&mut self, kind: Kind, address: u32, width: u8) -> Transaction {
        assert_eq!(width, REGISTER_BITS);
        let transaction = self
            .expected
            .next()
            .unwrap_or_else(|| panic!("unexpected {kind:?} at {address:#x}"));
        assert_eq!(transaction.kind, kind);
        assert_eq!(transaction.address, address, "{kind:?} address");
        transaction
    }
}

impl RegisterAccess for Registers {
    fn peek(&mut self, address: u32, width: u8) -> Result<u32> {
        let transaction = self.next(Kind::Peek, address, width);
        transaction.fail()?;
        Ok(transaction.value)
    }

    fn poke(&mut self, address: u32, width: u8, value: u32) -> Result<()> {
        let transaction = self.next(Kind::Poke, address, width);
        assert_eq!(transaction.value, value, "poke value at {address:#x}");
        transaction.fail()
    }
}

impl Drop for Registers {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct Connector {
    expected: Generic<Transaction>,
    live: Arc<AtomicUsize>,
    connects: AtomicUsize,
    refuse: Option<ErrorKind>,
}

impl Connector {
    pub fn new(expectations: &[Transaction]) -> Self {
        Self {
            expected: Generic::new(expectations),
            live: Arc::new(AtomicUsize::new(0)),
            connects: AtomicUsize::new(0),
            refuse: None,
        }
    }

    pub fn refusing(kind: ErrorKind) -> Self {
        Self {
            refuse: Some(kind),
            ..Self::new(&[])
        }
    }

    /// Number of connection attempts so far.
    pub fn connects(&self) -> usize {
        self.connects.load(Ordering::SeqCst)
    }

    /// Number of connections handed out and not yet dropped.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    /// Asserts every expected transaction was consumed.
    pub fn done(&mut self) {
        self.expected.done();
    }
}

impl Connect for Connector {
    type Connection = Registers;

    fn connect(&self, _endpoint: &Endpoint) -> io::Result<Registers> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        if let Some(kind) = self.refuse {
            return Err(kind.into());
        }

        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(Registers {
            expected: self.expected.clone(),
            live: Arc::clone(&self.live),
        })
    }
}
