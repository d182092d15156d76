//! SimpleGraph 命令行工具
//!
//! 读取 JSON 图文档并打印两点之间的最短路径

use anyhow::Context;
use clap::Parser;
use simplegraph::factory::{graph_factory, synchronized_graph_factory};
use simplegraph::import::GraphDocument;
use simplegraph::{Graph, PathResult};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simplegraph")]
#[command(about = "SimpleGraph 最短路径查询工具")]
struct Args {
    /// 图文档路径（JSON）
    #[arg(short, long)]
    input: PathBuf,

    /// 起点
    #[arg(short, long)]
    from: String,

    /// 终点
    #[arg(short, long)]
    to: String,

    /// 使用加锁的图
    #[arg(short, long)]
    synchronized: bool,

    /// 以 JSON 格式输出
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let document = GraphDocument::<String>::from_path(&args.input)
        .with_context(|| format!("无法读取图文档 {}", args.input.display()))?;

    let path = if args.synchronized {
        document
            .build(synchronized_graph_factory())?
            .shortest_path(&args.from, &args.to)
    } else {
        document
            .build(graph_factory())?
            .shortest_path(&args.from, &args.to)
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&path)?);
        return Ok(());
    }

    match path {
        Some(path) => print_path(&path),
        None => println!("{} 到 {} 不可达", args.from, args.to),
    }

    Ok(())
}

fn print_path(path: &PathResult<String>) {
    println!("路径: {}", path.vertices.join(" -> "));
    for edge in &path.edges {
        println!("  {}", edge);
    }
    println!("边数: {}", path.length);
    println!("总权重: {}", path.total_weight);
}
