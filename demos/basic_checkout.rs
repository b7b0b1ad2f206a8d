//! Basic catalog and checkout walkthrough

use bigdecimal::BigDecimal;
use grocery_checkout::{Catalog, CheckoutPolicy, MissingItemPolicy};

const CATALOG: &str = "\
Bread 10 2.00 1
Milk 6 3.49 0
Apples 40 0.50 0
Soda 12 1.25 1
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Grocery Checkout - Basic Walkthrough\n");

    // 1. Load the catalog
    let mut catalog = Catalog::in_memory();
    let summary = catalog.load_from_str(CATALOG)?;
    println!("Loaded {} items ({} duplicates)", summary.loaded, summary.duplicates);

    for item in catalog.items() {
        println!(
            "  {:<8} qty {:>3}  price {:>5}  taxable: {}",
            item.name, item.quantity, item.price, item.taxable
        );
    }
    println!();

    // 2. Add and remove individual items
    catalog.add_item("Cheese", 4, "5.75".parse::<BigDecimal>()?, false);
    let added_again = catalog.add_item("Cheese", 1, BigDecimal::from(1), false);
    println!("Second Cheese add accepted: {}", added_again);
    catalog.remove_item("Soda");
    println!("Catalog size after edits: {}\n", catalog.size());

    // 3. Check out at 8.25% tax
    catalog.set_tax_rate("8.25".parse::<BigDecimal>()?)?;
    let receipt = catalog.checkout_lines(["Bread", "Milk", "Bread", "Apples"])?;
    println!("{}\n", receipt);

    // 4. Unknown items abort by default, or can be skipped
    match catalog.checkout_lines(["Bread", "Caviar"]) {
        Ok(_) => println!("Unexpected success"),
        Err(err) => println!("Aborted checkout: {}", err),
    }

    catalog.set_checkout_policy(CheckoutPolicy {
        on_missing: MissingItemPolicy::Skip,
        ..CheckoutPolicy::default()
    });
    let receipt = catalog.checkout_lines(["Bread", "Caviar"])?;
    println!("\n{}\n", receipt);

    println!(
        "Bread left in stock: {}",
        catalog.find_item_required("Bread")?.quantity
    );

    Ok(())
}
