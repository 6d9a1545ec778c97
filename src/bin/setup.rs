use std::fs;
use std::path::Path;

use anyhow::Context;

static ENV_TEMPLATE: &str = "# Valorant Finder Backend Environment Variables

# Valorant API Configuration
VALORANT_API_KEY=your-henrikdev-api-key
VALORANT_REGION=na

# Server Configuration
PORT=3001
APP_ENV=development

# CORS Origins
ALLOWED_ORIGINS=http://localhost:3000,https://valorant-finder-app.vercel.app,https://valorant-finder.com,*.vercel.app
";

fn main() -> anyhow::Result<()> {
    println!("Setting up Valorant Finder Backend...\n");

    let env_path = Path::new(".env");
    let example_path = Path::new(".env.example");

    if env_path.exists() {
        println!(".env file already exists");
    } else if example_path.exists() {
        fs::copy(example_path, env_path).context("failed to copy .env.example to .env")?;
        println!("Created .env file from .env.example");
    } else {
        fs::write(env_path, ENV_TEMPLATE).context("failed to write .env")?;
        println!("Created .env file with default configuration");
    }

    println!("\nSetup complete!");
    println!("\nNext steps:");
    println!("1. Put your HenrikDev key in VALORANT_API_KEY");
    println!("2. Start the server: cargo run");
    println!("3. Test API: curl http://localhost:3001/health");
    Ok(())
}
