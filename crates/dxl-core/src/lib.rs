//! DXL Core Types and Definitions
//!
//! This crate provides the foundational types shared by the DXL scanner,
//! parser and code generator. It includes:
//!
//! - **Origins**: Source locations attached to syntax tree nodes ([`origin::Origin`])
//! - **Time**: Instants with distant past/future sentinels and time intervals ([`time`] module)
//! - **AST**: The immutable syntax tree of a DXL document ([`ast`] module)

pub mod ast;
pub mod origin;
pub mod time;
