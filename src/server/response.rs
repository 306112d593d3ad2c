//! # Response Shapes
//!
//! Success bodies for the five CRUD operations.

use serde::Serialize;

use crate::store::Record;

/// Full listing with its count.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub count: usize,
    pub transactions: Vec<Record>,
}

impl ListResponse {
    pub fn new(transactions: Vec<Record>) -> Self {
        Self {
            count: transactions.len(),
            transactions,
        }
    }
}

/// 201 body for a newly created record, surfacing its assigned id.
#[derive(Debug, Clone, Serialize)]
pub struct CreateResponse {
    pub message: &'static str,
    pub id: u64,
    pub transaction: Record,
}

impl CreateResponse {
    pub fn new(transaction: Record) -> Self {
        Self {
            message: "Transaction created successfully",
            id: transaction.id,
            transaction,
        }
    }
}

/// 200 body for a merged record.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateResponse {
    pub message: &'static str,
    pub transaction: Record,
}

impl UpdateResponse {
    pub fn new(transaction: Record) -> Self {
        Self {
            message: "Transaction updated successfully",
            transaction,
        }
    }
}

/// 200 body carrying the removed record's full pre-deletion contents.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub deleted_transaction: Record,
}

impl DeleteResponse {
    pub fn new(deleted_transaction: Record) -> Self {
        Self {
            message: "Transaction deleted successfully",
            deleted_transaction,
        }
    }
}
