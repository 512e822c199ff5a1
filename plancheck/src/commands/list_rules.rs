// plancheck/src/commands/list_rules.rs

use plancheck_core::domain::ports::RuleSource;

use super::context::Context;

pub fn execute(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.store();
    let names = store.list_rule_sets();

    if names.is_empty() {
        eprintln!(
            "⚠️  No rule sets found in {}",
            store.rules_dir().display()
        );
        return Ok(());
    }

    println!("📚 Available rule sets ({}):", names.len());
    for name in names {
        println!("   • {}", name);
    }
    Ok(())
}
