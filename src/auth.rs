use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Config;

type HmacSha1 = Hmac<Sha1>;

static TOKEN_LIFETIME_SECS: u64 = 3600;

// 上传完成后服务端按此模板返回文件信息，变量由服务端求值
static RETURN_BODY: &str =
    r#"{"key": $(key), "hash": $(etag), "width": $(imageInfo.width), "height": $(imageInfo.height)}"#;

#[derive(Serialize)]
struct PutPolicy<'a> {
    scope: &'a str,
    deadline: u64,
    #[serde(rename = "returnBody")]
    return_body: &'a str,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// 根据密钥和存储空间生成上传凭证，进程启动时调用一次。
pub fn upload_token(config: &Config) -> String {
    let policy = PutPolicy {
        scope: &config.bucket,
        deadline: unix_now() + TOKEN_LIFETIME_SECS,
        return_body: RETURN_BODY,
    };
    let policy_json = serde_json::to_string(&policy).unwrap();
    let encoded_policy = URL_SAFE.encode(policy_json);

    let mut mac = HmacSha1::new_from_slice(config.secret_key.as_bytes()).unwrap();
    mac.update(encoded_policy.as_bytes());
    let sign = URL_SAFE.encode(mac.finalize().into_bytes());

    format!("{}:{}:{}", config.access_key, sign, encoded_policy)
}
