//! 基于拉取的惰性求值库。
//!
//! 流水线由输入与任意数量的算子组成，每个算子包装并独占上游。在物化算子开始拉取之前不会移动任何元素，
//! 拉取时逐级向上游请求，每次只推进一步。
//!
//! 算子分为两个能力层级：对元素类型没有要求的基础算子，以及要求元素支持相等与哈希的集合算子
//! （`distinct`、`union`、`except`、`intersect`等），后者通过泛型约束在编译期区分。
//!
//! ```
//! use lazy_pipe::Pipe;
//!
//! let res = Pipe::of(vec![10, 20, 60, 70])
//!     .union(Pipe::of(vec![30, 40, 80, 90, 100]))
//!     .filter(|x| *x > 50)
//!     .skip(3)
//!     .take(2)
//!     .to_vec();
//! assert_eq!(res, vec![90, 100]);
//! ```

pub mod bridge;
mod config;
mod err;
mod input;
mod op;
mod output;
mod pipe;

pub use bridge::{Producer, produce};
pub use config::{BridgeConfig, ENV_BRIDGE_CAPACITY, ENV_BRIDGE_THREAD};
pub use err::{LzErr, LzRes};
pub use pipe::Pipe;

/// 整数类型，计数与窗口参数允许为负数，负数按无数据处理。
pub type Integer = i64;
