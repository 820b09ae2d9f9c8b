use anyhow::Result;
use clap::Parser;
use qcm_server::services::difficulty_labeler;
use qcm_server::utils::logging;
use std::path::PathBuf;

/// 按题目位置为主题文件标注难度
#[derive(Parser, Debug)]
#[command(name = "add_difficulty", version)]
struct Args {
    /// 主题题目文件
    #[arg(long, default_value = "themes/kubernetes.json")]
    file: PathBuf,

    /// 每个难度等级的题目数量
    #[arg(long, default_value_t = 50)]
    per_level: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(false);
    let args = Args::parse();

    difficulty_labeler::label_file(&args.file, args.per_level).await?;
    Ok(())
}
