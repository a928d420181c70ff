use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use indicatif::ProgressBar;
use reqwest::multipart;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::auth;
use crate::config::Config;
use crate::walker;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("upload rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// 上传成功后服务端按 returnBody 模板返回的文件信息。
#[derive(Deserialize, Debug)]
pub struct UploadInfo {
    pub key: String,
    pub hash: String,
    pub width: Option<u64>,
    pub height: Option<u64>,
}

pub struct UploadOutcome {
    pub key: String,
    pub result: Result<UploadInfo, UploadError>,
}

pub struct BatchReport {
    pub outcomes: Vec<UploadOutcome>,
    pub elapsed: Duration,
}

// 只取文件名作 key，不保留目录结构，不同子目录下的同名文件会相互覆盖
pub fn dest_key(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub struct Uploader<'a> {
    client: reqwest::Client,
    token: String,
    config: &'a Config,
}

impl<'a> Uploader<'a> {
    pub fn new(config: &'a Config) -> Uploader<'a> {
        Self {
            client: reqwest::Client::new(),
            token: auth::upload_token(config),
            config,
        }
    }

    pub async fn upload(&self, local_path: &Path, key: &str) -> Result<UploadInfo, UploadError> {
        let data = tokio::fs::read(local_path)
            .await
            .map_err(|source| UploadError::Read {
                path: local_path.to_path_buf(),
                source,
            })?;

        let part = multipart::Part::bytes(data).file_name(key.to_string());
        let form = multipart::Form::new()
            .text("token", self.token.clone())
            .text("key", key.to_string())
            .part("file", part);

        let res = self
            .client
            .post(&self.config.up_host)
            .multipart(form)
            .send()
            .await?;

        let status = res.status();
        if status == StatusCode::OK {
            Ok(res.json::<UploadInfo>().await?)
        } else {
            let body = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|json| json["error"].as_str().map(|s| s.to_string()))
                .unwrap_or(body);
            Err(UploadError::Rejected { status, message })
        }
    }

    pub async fn upload_dir(&self, dir_path: &Path) -> anyhow::Result<BatchReport> {
        let start = Instant::now();

        let files = walker::traverse(dir_path)
            .with_context(|| format!("failed to traverse {}", dir_path.display()))?;
        println!("{} {}", "🔍 共找到图片文件:".green(), files.len());

        let p_bar = ProgressBar::new(files.len() as u64);
        let mut outcomes = Vec::with_capacity(files.len());
        for file_path in &files {
            let key = dest_key(file_path);
            let result = self.upload(file_path, &key).await;
            match &result {
                Ok(_) => {
                    println!("{} {}", "✅ 上传成功".green(), key);
                }
                Err(err) => {
                    eprintln!("{} {}: {}", "❌ 上传失败".red(), key, err);
                }
            }
            outcomes.push(UploadOutcome { key, result });
            p_bar.inc(1);
        }
        p_bar.finish_and_clear();

        let elapsed = start.elapsed();
        println!(
            "{} {:.3}s",
            "✅ 全部上传完成，耗时".green(),
            elapsed.as_secs_f64()
        );
        Ok(BatchReport { outcomes, elapsed })
    }
}
