use colored::*;
use qiniu_cli::config::Config;
use qiniu_cli::prompt;
use qiniu_cli::uploader::Uploader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let input = match prompt::ask_dir_path() {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{} {}", "❌ 读取输入失败:".red(), err);
            return Ok(());
        }
    };

    // 提交前再校验一次
    let dir_path = match prompt::validate_dir(&input) {
        Ok(path) => path,
        Err(message) => {
            eprintln!("{}", message.red());
            return Ok(());
        }
    };

    let uploader = Uploader::new(&config);
    uploader.upload_dir(&dir_path).await?;
    Ok(())
}
