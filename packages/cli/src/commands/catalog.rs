use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagewright_builder::catalog::library_by_category;
use pagewright_builder::{Category, SectionLibraryItem, SECTION_LIBRARY};

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only show one category (layout, content, marketing, navigation)
    #[arg(short, long)]
    pub category: Option<Category>,
}

pub fn catalog(args: CatalogArgs) -> Result<()> {
    let items: Vec<&SectionLibraryItem> = match &args.category {
        Some(category) => library_by_category(*category),
        None => SECTION_LIBRARY.iter().collect(),
    };

    println!("{}", "📚 Section library".bright_blue().bold());
    for item in items {
        println!(
            "  {:<9} {:<14} {}",
            item.section_type.to_string().bright_white(),
            item.name,
            item.description.dimmed()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(flatten)]
        args: CatalogArgs,
    }

    #[test]
    fn test_category_arg_is_typed() {
        let cli = TestCli::try_parse_from(["catalog", "--category", "content"]).unwrap();
        assert_eq!(cli.args.category, Some(Category::Content));

        assert!(TestCli::try_parse_from(["catalog", "--category", "sidebar"]).is_err());
    }
}
