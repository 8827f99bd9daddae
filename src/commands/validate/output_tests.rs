//! Output formatting tests for validate command.

#[cfg(test)]
mod tests {
    use super::super::execute::ValidateResult;
    use crate::http::Route;
    use rstest::{fixture, rstest};

    // =========================================================================
    // Expected outputs
    // =========================================================================

    const SHOP_TABLE: &str = "\
✓ Configuration valid: api.yaml
Project: shop 1.0.0
Models: 2 (Product, Order)
Endpoints: 1

Routes (3):
  GET /products
  GET /products/{id}
  GET /products/search";

    const EMPTY_TABLE: &str = "\
✓ Configuration valid: empty.yaml
Project: empty 0.1.0
Models: 0
Endpoints: 0

Routes (0):
  (none)";

    // =========================================================================
    // Fixtures
    // =========================================================================

    #[fixture]
    fn shop_result() -> ValidateResult {
        ValidateResult {
            config: "api.yaml".to_string(),
            project: "shop".to_string(),
            version: "1.0.0".to_string(),
            models: vec!["Product".to_string(), "Order".to_string()],
            endpoints: 1,
            routes: vec![
                Route::for_operation("products", "list"),
                Route::for_operation("products", "read"),
                Route::for_operation("products", "search"),
            ],
        }
    }

    #[fixture]
    fn empty_result() -> ValidateResult {
        ValidateResult {
            config: "empty.yaml".to_string(),
            project: "empty".to_string(),
            version: "0.1.0".to_string(),
            models: vec![],
            endpoints: 0,
            routes: vec![],
        }
    }

    // =========================================================================
    // Table format tests
    // =========================================================================

    crate::output_table_test! {
        test_name: test_to_table_shop,
        fixture: shop_result,
        fixture_type: ValidateResult,
        expected: SHOP_TABLE,
    }

    crate::output_table_test! {
        test_name: test_to_table_empty,
        fixture: empty_result,
        fixture_type: ValidateResult,
        expected: EMPTY_TABLE,
    }

    crate::output_table_contains_test! {
        test_name: test_to_table_lists_parameterized_routes,
        fixture: shop_result,
        fixture_type: ValidateResult,
        contains: ["Routes (3):", "  GET /products/{id}", "  GET /products/search"],
    }

    // =========================================================================
    // JSON format tests
    // =========================================================================

    crate::output_json_test! {
        test_name: test_format_json,
        fixture: shop_result,
        fixture_type: ValidateResult,
        assertions: {
            "project": "shop",
            "version": "1.0.0",
            "endpoints": 1,
        },
    }

    #[rstest]
    fn test_format_json_routes(shop_result: ValidateResult) {
        use crate::output::{OutputFormat, Outputable};

        let parsed: serde_json::Value =
            serde_json::from_str(&shop_result.format(OutputFormat::Json)).unwrap();
        assert_eq!(parsed["models"][1], "Order");
        assert_eq!(parsed["routes"][1]["path"], "/products/{id}");
        assert_eq!(parsed["routes"][2]["operation"], "search");
    }

    // =========================================================================
    // Toon format tests
    // =========================================================================

    crate::output_toon_test! {
        test_name: test_format_toon,
        fixture: shop_result,
        fixture_type: ValidateResult,
        contains: ["shop", "Product", "/products/search"],
    }
}
