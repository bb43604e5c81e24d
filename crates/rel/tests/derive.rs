use rel::{apply, schema::Cardinality, set, Document, Mutation, Primitive, Record, Structset, Type, Value};

use uuid::Uuid;

#[derive(Debug, Default, Clone, Copy, PartialEq, Primitive)]
struct Cents(i64);

#[derive(Debug, Default, Record)]
#[table = "orders"]
struct Order {
    #[key]
    code: String,

    #[column("total_cents")]
    total: Cents,

    #[has_one(foreign_key = "order_code", references = "code")]
    invoice: Option<Invoice>,

    #[has_one(foreign_key = "order_code", references = "code")]
    shipment: Box<Shipment>,

    #[skip]
    scratch: Vec<String>,
}

#[derive(Debug, Default, Record)]
struct Invoice {
    id: i64,
    order_code: String,
}

#[derive(Debug, Default, Record)]
struct Shipment {
    id: i64,
    order_code: String,
    carrier: String,
}

#[test]
fn declaration_table() {
    let schema = Order::schema();

    assert_eq!(schema.name, "Order");
    assert_eq!(schema.table, "orders");
    assert_eq!(Shipment::schema().table, "shipments");
    assert_eq!(schema.fields.len(), 4);
    assert_eq!(schema.primary_key_field().unwrap().column(), "code");

    let total = schema.field_by_name("total").unwrap();
    assert_eq!(total.column(), "total_cents");
    assert_eq!(total.primitive_ty(), Some(&Type::I64));

    let associations: Vec<_> = schema
        .associations()
        .map(|(field, association)| {
            (
                field.column(),
                association.cardinality,
                association.foreign_key.as_str(),
                association.references.as_deref(),
                association.target().name,
            )
        })
        .collect();

    assert_eq!(
        associations,
        [
            ("invoice", Cardinality::One, "order_code", Some("code"), "Invoice"),
            ("shipment", Cardinality::One, "order_code", Some("code"), "Shipment"),
        ]
    );

    assert!(schema.field_by_name("scratch").is_none());
}

#[test]
fn newtype_fields() {
    let mut order = Order {
        code: "A-1".to_string(),
        ..Default::default()
    };

    let mut doc = Document::new(&mut order).unwrap();
    doc.set_field("total_cents", 1250_i64).unwrap();

    assert_eq!(doc.field("total"), Some(Value::I64(1250)));
    assert_eq!(order.total, Cents(1250));
}

#[test]
fn option_and_box_associations() {
    let mut order = Order {
        code: "A-1".to_string(),
        scratch: vec!["kept".to_string()],
        ..Default::default()
    };

    let mut doc = Document::new(&mut order).unwrap();
    assert!(!doc.is_loaded("invoice"));
    assert!(!doc.is_loaded("shipment"));

    doc.assoc_document("invoice", None)
        .unwrap()
        .set_field("order_code", "A-1")
        .unwrap();
    doc.assoc_document("shipment", Some(0))
        .unwrap()
        .set_field("carrier", "DHL")
        .unwrap();

    assert!(doc.is_loaded("invoice"));
    assert!(doc.is_loaded("shipment"));

    let err = doc.assoc_document("shipment", Some(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "index 1 is out of bounds for Order.shipment which holds one record"
    );

    assert_eq!(order.invoice.as_ref().unwrap().order_code, "A-1");
    assert_eq!(order.shipment.carrier, "DHL");
    assert_eq!(order.scratch, ["kept"]);
}

#[derive(Debug, Default, Record)]
struct Session {
    id: Uuid,
    token: String,
}

#[test]
fn uuid_primary_key() {
    let id = Uuid::new_v4();

    let mut session = Session::default();
    let mut doc = Document::new(&mut session).unwrap();
    assert!(doc.is_primary_zero());

    let mutation = apply(&mut doc, [Structset::new(true)]).unwrap();
    assert!(mutation.is_empty());

    doc.set_field("id", id).unwrap();
    assert_eq!(doc.primary_key(), Some(("id", Value::Uuid(id))));

    let mutation = apply(&mut doc, [Structset::new(true)]).unwrap();
    assert_eq!(mutation, Mutation::from_iter([set("id", id)]));
}
