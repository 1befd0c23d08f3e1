//! 中缀转后缀翻译器

pub mod error;
pub mod shunting_yard;

// 重新导出常用类型
pub use error::SyntaxError;
pub use shunting_yard::{convert_to_postfix, ShuntingYard};
