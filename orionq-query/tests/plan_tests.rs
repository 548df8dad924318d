use orionq_model::{CustomProperties, FieldRegistry, FilterSpec};
use orionq_query::{QueryBuilder, QueryError, DEFAULT_ORDER_BY};
use pretty_assertions::assert_eq;
use serde_json::json;

fn builder() -> QueryBuilder<'static> {
    QueryBuilder::new(FieldRegistry::orion())
}

fn where_line(text: &str) -> Option<&str> {
    text.lines().find_map(|l| l.strip_prefix("WHERE "))
}

// ── Projection ───────────────────────────────────────────────────

#[test]
fn defaults_always_projected() {
    let plan = builder().build().unwrap();
    let defaults: Vec<String> = FieldRegistry::orion()
        .default_fields()
        .iter()
        .map(|f| f.path())
        .collect();
    assert_eq!(plan.projection(), defaults.as_slice());
}

#[test]
fn extra_fields_appended_verbatim() {
    let plan = builder()
        .extra_fields(["N.CPULoad", "N.PercentMemoryUsed"])
        .build()
        .unwrap();
    let projection = plan.projection();
    assert_eq!(projection.len(), 24);
    assert_eq!(projection[22], "N.CPULoad");
    assert_eq!(projection[23], "N.PercentMemoryUsed");
    assert_eq!(projection[0], "N.NodeID");
}

#[test]
fn duplicate_extra_fields_are_kept() {
    let plan = builder().extra_fields(["N.Caption"]).build().unwrap();
    let count = plan.projection().iter().filter(|f| *f == "N.Caption").count();
    assert_eq!(count, 2);
}

// ── Custom properties ────────────────────────────────────────────

#[test]
fn custom_property_names_project_without_filtering() {
    let filters = FilterSpec::new().with_custom_properties(CustomProperties::Names(vec![
        "Site".into(),
        "Owner".into(),
    ]));
    let plan = builder().filters(filters).build().unwrap();

    assert!(plan.clauses().is_empty());
    let tail = &plan.projection()[22..];
    assert_eq!(tail, ["N.CustomProperties.Site", "N.CustomProperties.Owner"]);
    assert!(where_line(&plan.render()).is_none());
}

#[test]
fn custom_properties_key_through_builder_is_projected() {
    let filters = FilterSpec::new().with("CustomProperties", ["Site"]);
    let plan = builder().filters(filters).build().unwrap();

    assert_eq!(plan.projection().len(), 23);
    assert_eq!(plan.projection()[22], "N.CustomProperties.Site");
    assert!(plan.clauses().is_empty());
}

#[test]
fn custom_property_map_projects_and_filters() {
    let filters =
        FilterSpec::from_json(&json!({"CustomProperties": {"Site": "HQ*", "Owner": "net"}}))
            .unwrap();
    let plan = builder().filters(filters).build().unwrap();

    assert_eq!(plan.clauses().len(), 2);
    assert_eq!(plan.projection().len(), 24);
    assert_eq!(
        where_line(&plan.render()),
        Some("N.CustomProperties.Owner LIKE 'net' AND N.CustomProperties.Site LIKE 'HQ%'")
    );
}

#[test]
fn custom_property_clauses_follow_registry_clauses() {
    let filters = FilterSpec::from_json(&json!({
        "CustomProperties": {"Site": "HQ"},
        "Vendor": "Cisco",
    }))
    .unwrap();
    let plan = builder().filters(filters).build().unwrap();
    assert_eq!(
        where_line(&plan.render()),
        Some("N.Vendor LIKE 'Cisco' AND N.CustomProperties.Site LIKE 'HQ'")
    );
}

#[test]
fn blank_custom_property_name_is_rejected() {
    let filters =
        FilterSpec::new().with_custom_properties(CustomProperties::Names(vec!["  ".into()]));
    let err = builder().filters(filters).build().unwrap_err();
    assert!(matches!(err, QueryError::InvalidPropertyName(_)));
}

// ── WHERE ────────────────────────────────────────────────────────

#[test]
fn no_filters_omits_where_entirely() {
    let text = builder().build().unwrap().render();
    assert!(!text.contains("WHERE"));
    assert!(text.ends_with(&format!("ORDER BY {DEFAULT_ORDER_BY}")));
}

#[test]
fn only_empty_filters_omits_where() {
    let filters = FilterSpec::new()
        .with("Vendor", "")
        .with("Status", Vec::<String>::new());
    let text = builder().filters(filters).build().unwrap().render();
    assert!(!text.contains("WHERE"));
}

#[test]
fn unknown_parameters_are_ignored() {
    let filters = FilterSpec::new().with("CpuLoad", "90").with("Vendor", "Cisco");
    let plan = builder().filters(filters).build().unwrap();
    assert_eq!(plan.clauses().len(), 1);
    assert_eq!(where_line(&plan.render()), Some("N.Vendor LIKE 'Cisco'"));
}

#[test]
fn clauses_follow_registry_order_not_input_order() {
    let filters = FilterSpec::new()
        .with("Model", "WS-C3850*")
        .with("Caption", "core*")
        .with("Status", "1");
    let plan = builder().filters(filters).build().unwrap();
    let fields: Vec<&str> = plan.clauses().iter().map(|c| c.field()).collect();
    assert_eq!(fields, ["N.Caption", "N.Status", "E.Model"]);
}

#[test]
fn entity_fields_filter_on_entity_alias() {
    let filters = FilterSpec::new().with("serial", ["FOC*", "FDO*"]);
    let plan = builder().filters(filters).build().unwrap();
    assert_eq!(
        where_line(&plan.render()),
        Some("(E.Serial LIKE 'FOC%' OR E.Serial LIKE 'FDO%')")
    );
}

// ── TOP / ORDER BY ───────────────────────────────────────────────

#[test]
fn zero_top_emits_no_modifier() {
    let plan = builder().top(0).build().unwrap();
    assert_eq!(plan.top(), None);
    assert!(plan.render().starts_with("SELECT N.NodeID, "));
    assert!(!plan.render().contains("TOP"));
}

#[test]
fn positive_top_follows_select() {
    let plan = builder().top(25).build().unwrap();
    assert_eq!(plan.top(), Some(25));
    assert!(plan.render().starts_with("SELECT TOP 25 N.NodeID, "));
}

#[test]
fn order_by_is_verbatim() {
    let plan = builder().order_by("E.NoSuchField DESC").build().unwrap();
    assert!(plan.render().ends_with("ORDER BY E.NoSuchField DESC"));
}

#[test]
fn blank_order_by_uses_default() {
    let plan = builder().order_by("   ").build().unwrap();
    assert_eq!(plan.order_by(), DEFAULT_ORDER_BY);
}

// ── Full text ────────────────────────────────────────────────────

#[test]
fn vendor_and_status_query_text() {
    let filters = FilterSpec::new()
        .with("Vendor", ["Cisco"])
        .with("Status", ["1", "2"]);
    let text = builder().filters(filters).build().unwrap().render();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("SELECT N.NodeID, N.Caption, "));
    assert!(lines[0].ends_with("E.HardwareRevision, E.FirmwareRevision"));
    assert_eq!(lines[1], "FROM NCM.NodeProperties P");
    assert_eq!(lines[2], "INNER JOIN Orion.Nodes N ON P.CoreNodeID = N.NodeID");
    assert_eq!(
        lines[3],
        "LEFT JOIN NCM.EntityPhysical E ON E.NodeID = P.NodeID AND E.EntityClass = 3"
    );
    assert_eq!(
        lines[4],
        "WHERE N.Vendor LIKE 'Cisco' AND (N.Status LIKE '1' OR N.Status LIKE '2')"
    );
    assert_eq!(lines[5], "ORDER BY N.Caption");
}

#[test]
fn join_topology_unaffected_by_filters() {
    let bare = builder().build().unwrap().render();
    let filtered = builder()
        .filters(FilterSpec::new().with("Serial", "X*"))
        .build()
        .unwrap()
        .render();
    let joins = |t: &str| -> Vec<String> {
        t.lines()
            .filter(|l| l.starts_with("FROM") || l.contains("JOIN"))
            .map(String::from)
            .collect()
    };
    assert_eq!(joins(&bare), joins(&filtered));
}

#[test]
fn plan_serializes_for_inspection() {
    let plan = builder()
        .filters(FilterSpec::new().with("Vendor", "Cisco"))
        .top(5)
        .build()
        .unwrap();
    let value = serde_json::to_value(&plan).unwrap();
    assert_eq!(value["top"], json!(5));
    assert_eq!(value["order_by"], json!("N.Caption"));
    assert_eq!(value["clauses"][0]["field"], json!("N.Vendor"));
}
