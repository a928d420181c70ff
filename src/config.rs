use std::env;

static DEFAULT_UP_HOST: &str = "https://upload-z2.qiniup.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub up_host: String,
}

impl Config {
    // 缺失的密钥不在本地校验，无效凭证会在上传时由服务端拒绝
    pub fn from_env() -> Config {
        Config {
            access_key: env::var("AccessKey").unwrap_or_default(),
            secret_key: env::var("SecretKey").unwrap_or_default(),
            bucket: env::var("BucketName").unwrap_or_default(),
            up_host: env::var("UploadHost").unwrap_or_else(|_| DEFAULT_UP_HOST.to_string()),
        }
    }
}
