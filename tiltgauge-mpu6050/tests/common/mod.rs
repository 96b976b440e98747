//! In-memory MPU-6050 register file behind an `embedded-hal` I2C bus

#![allow(dead_code)]

use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Error reported by the fake bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError(pub ErrorKind);

impl i2c::Error for FakeError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

/// Register file with scripted transport faults
///
/// Transactions are numbered from 0 in the order they arrive; any number in
/// `failing` fails with an arbitration loss. A `dead_register` fails every
/// transaction that addresses it.
pub struct FakeBus {
    pub address: u8,
    pub registers: [u8; 128],
    pub transactions: usize,
    pub failing: Vec<usize>,
    pub dead_register: Option<u8>,
    pointer: usize,
}

impl FakeBus {
    /// Device asleep at 0x68, as after power-on
    pub fn new() -> Self {
        let mut registers = [0u8; 128];
        registers[0x6B] = 0x40;
        registers[0x75] = 0x68;
        Self {
            address: 0x68,
            registers,
            transactions: 0,
            failing: Vec::new(),
            dead_register: None,
            pointer: 0,
        }
    }

    /// Device lying still with the arm level: +1 g on Z
    pub fn level() -> Self {
        let mut bus = Self::new();
        bus.set_word(0x3F, 16384);
        bus
    }

    pub fn set_word(&mut self, register: u8, value: i16) {
        let [high, low] = value.to_be_bytes();
        self.registers[register as usize] = high;
        self.registers[register as usize + 1] = low;
    }

    pub fn failing_at(mut self, transactions: &[usize]) -> Self {
        self.failing = transactions.to_vec();
        self
    }

    pub fn with_dead_register(mut self, register: u8) -> Self {
        self.dead_register = Some(register);
        self
    }
}

impl ErrorType for FakeBus {
    type Error = FakeError;
}

impl I2c for FakeBus {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), FakeError> {
        let number = self.transactions;
        self.transactions += 1;

        if address != self.address {
            return Err(FakeError(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)));
        }
        if self.failing.contains(&number) {
            return Err(FakeError(ErrorKind::ArbitrationLoss));
        }

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let Some((&register, data)) = bytes.split_first() else {
                        continue;
                    };
                    if self.dead_register == Some(register) {
                        return Err(FakeError(ErrorKind::Bus));
                    }
                    self.pointer = register as usize;
                    for &byte in data {
                        self.registers[self.pointer % 128] = byte;
                        self.pointer += 1;
                    }
                }
                Operation::Read(buffer) => {
                    for byte in buffer.iter_mut() {
                        *byte = self.registers[self.pointer % 128];
                        self.pointer += 1;
                    }
                }
            }
        }
        Ok(())
    }
}
