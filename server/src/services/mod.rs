//! Service layer between routes and the LLM adapter.

pub mod generate;
