//! 通用工具
//!
//! 与具体表达式语法无关的基础数据结构。

pub mod stack;

pub use stack::Stack;
