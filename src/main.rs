use anyhow::Result;
use faq_generator::{logger, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logger::init_with_config(&config)?;

    // 初始化并运行应用
    App::initialize(config).run().await?;

    Ok(())
}
