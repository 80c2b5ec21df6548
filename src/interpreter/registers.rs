use crate::{
    error::EvalError,
    interpreter::{evaluator::EvalResult, value::Value},
    util::num::i64_to_usize_checked,
};

/// A single named storage slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Register {
    /// The alias under which the register was created.
    pub alias: String,
    /// The currently stored value.
    pub value: Value,
}

/// The append-only register file backing the language's variables.
///
/// A register's address is its index. Addresses strictly increase as
/// registers are created and are never reused or freed for the life of the
/// session.
#[derive(Debug, Default)]
pub struct Registers {
    slots: Vec<Register>,
}

impl Registers {
    /// Creates an empty register file.
    #[must_use]
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Returns the address associated with `alias`, creating a zero-valued
    /// register for it first if none exists.
    ///
    /// The search is linear and returns the *first* register carrying the
    /// alias, so of several same-named registers the oldest one wins.
    pub fn resolve(&mut self, alias: &str) -> usize {
        if let Some(address) = self.slots.iter().position(|r| r.alias == alias) {
            return address;
        }

        self.declare(alias)
    }

    /// Creates a new zero-valued register for `alias` unconditionally and
    /// returns its address.
    ///
    /// Used by `local`: an existing register with the same alias is left in
    /// place and keeps winning `resolve` lookups, so the fresh register is
    /// only reachable through the returned address.
    pub fn declare(&mut self, alias: &str) -> usize {
        self.slots.push(Register { alias: alias.to_string(),
                                   value: Value::Integer(0), });

        self.slots.len() - 1
    }

    /// Reads the value stored at `address`.
    ///
    /// # Errors
    /// Returns [`EvalError::AddressOutOfRange`] if `address` is negative or
    /// not a previously allocated index.
    pub fn read(&self, address: i64) -> EvalResult<Value> {
        let index = self.index(address)?;

        Ok(self.slots[index].value)
    }

    /// Stores `value` at `address`.
    ///
    /// # Errors
    /// Returns [`EvalError::AddressOutOfRange`] if `address` is negative or
    /// not a previously allocated index.
    pub fn write(&mut self, address: i64, value: Value) -> EvalResult<()> {
        let index = self.index(address)?;
        self.slots[index].value = value;

        Ok(())
    }

    /// Iterates over the registers in allocation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Register> {
        self.slots.iter()
    }

    /// Returns the number of allocated registers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no registers have been allocated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn index(&self, address: i64) -> EvalResult<usize> {
        let size = self.slots.len();
        let index = i64_to_usize_checked(address,
                                         EvalError::AddressOutOfRange { address,
                                                                        size })?;

        if index >= size {
            return Err(EvalError::AddressOutOfRange { address, size });
        }

        Ok(index)
    }
}
