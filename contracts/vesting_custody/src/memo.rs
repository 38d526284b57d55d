//! Deposit memo grammar: `kind ":" [id]`, with kind `plan` or `issue`.
//!
//! `"plan:"` and `"issue:"` leave the id to the sender's last reference,
//! `"plan:7"` and `"issue:12"` name it. Anything whose kind is not recognized
//! is left alone; a recognized kind with a bad id part is an error.

use crate::error::Error;
use crate::types::MAX_MEMO_SIZE;
use soroban_sdk::String;

const PLAN_KIND: &[u8] = b"plan";
const ISSUE_KIND: &[u8] = b"issue";
const SEPARATOR: u8 = b':';

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DepositMemo {
    /// Plan fee payment, `None` means the sender's last plan
    Plan(Option<u64>),
    /// Issue deposit, `None` means the sender's last issue
    Issue(Option<u64>),
    Unrecognized,
}

pub fn parse_memo(memo: &String) -> Result<DepositMemo, Error> {
    let len = memo.len();
    if len > MAX_MEMO_SIZE {
        return Ok(DepositMemo::Unrecognized);
    }
    let mut buf = [0u8; MAX_MEMO_SIZE as usize];
    let bytes = &mut buf[..len as usize];
    memo.copy_into_slice(bytes);
    parse(bytes)
}

pub fn parse(memo: &[u8]) -> Result<DepositMemo, Error> {
    let mut fields = memo.split(|b| *b == SEPARATOR);
    let kind = fields.next().unwrap_or(&[]);

    let make: fn(Option<u64>) -> DepositMemo = if kind == PLAN_KIND {
        DepositMemo::Plan
    } else if kind == ISSUE_KIND {
        DepositMemo::Issue
    } else {
        return Ok(DepositMemo::Unrecognized);
    };

    let id_field = fields.next().ok_or(Error::InvalidMemo)?;
    if fields.next().is_some() {
        return Err(Error::InvalidMemo);
    }

    if id_field.is_empty() {
        return Ok(make(None));
    }
    Ok(make(Some(parse_id(id_field)?)))
}

fn parse_id(field: &[u8]) -> Result<u64, Error> {
    let mut id: u64 = 0;
    for b in field {
        if !b.is_ascii_digit() {
            return Err(Error::InvalidMemo);
        }
        id = id
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u64))
            .ok_or(Error::InvalidMemo)?;
    }
    if id == 0 {
        return Err(Error::InvalidMemo);
    }
    Ok(id)
}
