//! Startup banner and session farewell.

use crate::compose::domain_symbol;
use crate::consts::VERSION;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub domains: &'a [&'a str],
    pub originator: &'a str,
    pub knowledge: &'a str,
    pub seed: u64,
}

/// Render the welcome banner.
pub fn banner_text(info: &BannerInfo) -> String {
    let domains = info
        .domains
        .iter()
        .map(|d| format!("{} {d}", domain_symbol(d)))
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║               D V N C                 ║
   ║   {tagline:^33}   ║
   ╚═══════════════════════════════════════╝

   🎨 Welcome. I combine insights from several domains to help you
      innovate like {originator}. Share your engineering challenge!

   version    {version}
   domains    {domains}
   knowledge  {knowledge}
   seed       {seed}
"#,
        tagline = format!("{}'s intelligence reimagined", info.originator),
        originator = info.originator,
        version = VERSION,
        domains = domains,
        knowledge = info.knowledge,
        seed = info.seed,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

/// Print the session summary and farewell.
pub fn print_session_summary(analyses: usize) {
    if analyses > 0 {
        println!("session: {analyses} challenge(s) analyzed");
    }
    println!("goodbye.");
}
