use dialoguer::Input;
use std::io;
use std::path::PathBuf;

/// 校验输入是否为已存在的文件夹路径。
pub fn validate_dir(input: &str) -> Result<PathBuf, String> {
    let trimmed = input.trim();
    let path = PathBuf::from(trimmed);
    if !path.exists() {
        return Err(format!(
            "\"{}\" 该路径不存在 请输入一个正确的文件夹路径.",
            trimmed
        ));
    }
    if !path.is_dir() {
        return Err(format!(
            "\"{}\" 类型错误  请输入一个正确的文件夹路径.",
            trimmed
        ));
    }
    Ok(path)
}

pub fn ask_dir_path() -> io::Result<String> {
    let input: String = Input::new()
        .with_prompt("输入文件夹地址来上传图片至七牛云存储")
        .validate_with(|input: &String| -> Result<(), String> {
            validate_dir(input).map(|_| ())
        })
        .interact_text()?;
    Ok(input.trim().to_string())
}
