use thiserror::Error;

/// 流水线之外的失败：后台线程创建失败、物化结果不满足约定等。
///
/// 拉取协议本身没有错误通道，数据上的空、结束都通过`None`表达。
#[derive(Error, Debug, Eq, PartialEq)]
pub enum LzErr {
    #[error("[Bridge] Spawn producer thread `{thread}` error: {err}")]
    SpawnProducerErr { thread: String, err: String },

    #[error("[Output] Expected exactly one element for `{op}`, but the sequence is empty")]
    NoElement { op: &'static str },

    #[error("[Output] Expected exactly one element for `{op}`, but found more")]
    MoreThanOneElement { op: &'static str },

    #[error("[Output] Duplicate key `{key}` while collecting into map")]
    DuplicateKey { key: String },
}

pub type LzRes<T> = Result<T, LzErr>;
