use tracing_subscriber::EnvFilter;

/// `RUST_LOG` 優先，否則只開啟本 crate 的日誌
pub fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose {
        "rewards_service=debug,info"
    } else {
        "rewards_service=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// 給嵌入本 crate 的程式安裝全域 subscriber；已安裝過時回傳 false
pub fn init_logger(verbose: bool, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        // 同一個 process 只能安裝一次
        let _ = init_logger(true, false);
        assert!(!init_logger(false, true));
    }
}
