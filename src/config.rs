/// 通道容量环境变量，`unbounded`表示无界，其余必须为非负整数。
pub const ENV_BRIDGE_CAPACITY: &str = "LAZY_PIPE_BRIDGE_CAPACITY";
/// 后台生产线程名称环境变量。
pub const ENV_BRIDGE_THREAD: &str = "LAZY_PIPE_BRIDGE_THREAD";

const DEFAULT_THREAD_NAME: &str = "lazy-pipe-producer";

/// 通道桥接配置。
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BridgeConfig {
    /// 通道容量：`Some(0)`为同步交接，`Some(n)`为有界，`None`为无界。
    pub capacity: Option<usize>,
    /// 后台生产线程名称。
    pub thread_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig { capacity: Some(0), thread_name: DEFAULT_THREAD_NAME.to_owned() }
    }
}

impl BridgeConfig {
    pub fn new() -> BridgeConfig {
        BridgeConfig::default()
    }

    pub fn capacity(mut self, capacity: usize) -> BridgeConfig {
        self.capacity = Some(capacity);
        self
    }

    pub fn unbounded(mut self) -> BridgeConfig {
        self.capacity = None;
        self
    }

    pub fn thread_name(mut self, name: impl Into<String>) -> BridgeConfig {
        self.thread_name = name.into();
        self
    }

    /// 从环境变量读取配置，未设置或无法解析的项保持默认值。
    pub fn from_env() -> BridgeConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BridgeConfig {
        let mut config = BridgeConfig::default();
        if let Some(capacity) = lookup(ENV_BRIDGE_CAPACITY) {
            let capacity = capacity.trim();
            if capacity.eq_ignore_ascii_case("unbounded") {
                config.capacity = None;
            } else if let Ok(capacity) = capacity.parse() {
                config.capacity = Some(capacity);
            } else {
                tracing::warn!(key = ENV_BRIDGE_CAPACITY, value = capacity, "ignore invalid bridge capacity");
            }
        }
        if let Some(name) = lookup(ENV_BRIDGE_THREAD).filter(|name| !name.trim().is_empty()) {
            config.thread_name = name;
        }
        config
    }
}
