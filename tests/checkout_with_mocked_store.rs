use kitchen_storefront::cart::Cart;
use kitchen_storefront::checkout::{CheckoutError, CheckoutFlow, CheckoutStep, DeliveryDetails};
use kitchen_storefront::clients::{MenuClient, OrderClient};
use kitchen_storefront::framework::mock::MockClient;
use kitchen_storefront::framework::FrameworkError;
use kitchen_storefront::model::{MenuItem, Order, OrderId};
use kitchen_storefront::order_actor::OrderError;
use kitchen_storefront::pricing::DeliveryPolicy;
use kitchen_storefront::store::{ActorStore, StoreError};

/// Pattern: real checkout flow + mocked order table.
/// The order actor is scripted so each write can be made to fail.
fn store(order_mock: &MockClient<Order>) -> (ActorStore, MockClient<MenuItem>) {
    let menu_mock = MockClient::<MenuItem>::new();
    let store = ActorStore::new(
        MenuClient::new(menu_mock.client()),
        OrderClient::new(order_mock.client()),
    );
    (store, menu_mock)
}

fn ready_flow() -> CheckoutFlow {
    let mut flow = CheckoutFlow::new(DeliveryPolicy::default());
    *flow.details_mut() = DeliveryDetails::new("Asha", "9800000000", "12 Lake Road");
    flow.continue_to_payment().unwrap();
    flow.initiate_payment().unwrap();
    flow.enter_reference("402155667788");
    flow
}

fn cart() -> Cart {
    let mut cart = Cart::new();
    let momos = MenuItem::flat("m1", "Veg Momos", "Momos", 90.0);
    cart.add_item(&momos, None).unwrap();
    cart.add_item(&momos, None).unwrap();
    cart
}

fn order_row(id: &str) -> Order {
    Order {
        id: OrderId::from(id),
        customer_name: "Asha".into(),
        customer_phone: "9800000000".into(),
        customer_address: "12 Lake Road".into(),
        total_amount: 210.0,
        payment_status: "confirmed".into(),
        order_status: "placed".into(),
        utr_number: Some("402155667788".into()),
        created_at: None,
        lines: Vec::new(),
    }
}

#[tokio::test]
async fn test_order_write_failure_keeps_cart_and_payment_step() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock.expect_create().return_err(FrameworkError::ActorClosed);
    let (store, _menu_mock) = store(&order_mock);

    let mut cart = cart();
    let mut flow = ready_flow();
    let err = flow.place_order(&mut cart, &store).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Submission(_)));
    assert_eq!(err.user_message(), "Failed to place order. Please try again.");
    assert_eq!(cart.item_count(), 2);
    assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: true });
    assert_eq!(flow.reference().as_str(), "402155667788");
    assert_eq!(flow.details().customer_name, "Asha");
    order_mock.verify();
}

#[tokio::test]
async fn test_line_write_failure_deletes_order_row() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock.expect_create().return_ok(OrderId::from("o1"));
    order_mock
        .expect_get(OrderId::from("o1"))
        .return_ok(Some(order_row("o1")));
    order_mock
        .expect_action(OrderId::from("o1"))
        .return_err(FrameworkError::ActorClosed);
    order_mock.expect_delete(OrderId::from("o1")).return_ok(());
    let (store, _menu_mock) = store(&order_mock);

    let mut cart = cart();
    let mut flow = ready_flow();
    let err = flow.place_order(&mut cart, &store).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Submission(StoreError::Order(_))));
    assert!(!cart.is_empty());
    assert!(flow.order_id().is_none());
    // The compensating delete was the last scripted request.
    order_mock.verify();
}

#[tokio::test]
async fn test_failed_compensation_still_reports_line_error() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock.expect_create().return_ok(OrderId::from("o1"));
    order_mock
        .expect_get(OrderId::from("o1"))
        .return_ok(Some(order_row("o1")));
    order_mock
        .expect_action(OrderId::from("o1"))
        .return_err(FrameworkError::EntityError(Box::new(OrderError::ValidationError(
            "bad line".into(),
        ))));
    order_mock
        .expect_delete(OrderId::from("o1"))
        .return_err(FrameworkError::NotFound("o1".into()));
    let (store, _menu_mock) = store(&order_mock);

    let mut cart = cart();
    let mut flow = ready_flow();
    let err = flow.place_order(&mut cart, &store).await.unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Submission(StoreError::Order(OrderError::ValidationError(_)))
    ));
    assert_eq!(cart.item_count(), 2);
    order_mock.verify();
}

#[tokio::test]
async fn test_missing_order_row_is_a_submission_failure() {
    let mut order_mock = MockClient::<Order>::new();
    order_mock.expect_create().return_ok(OrderId::from("o1"));
    order_mock.expect_get(OrderId::from("o1")).return_ok(None);
    let (store, _menu_mock) = store(&order_mock);

    let mut cart = cart();
    let mut flow = ready_flow();
    let err = flow.place_order(&mut cart, &store).await.unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Submission(StoreError::MissingRow("orders"))
    ));
    assert_eq!(flow.step(), &CheckoutStep::Payment { initiated: true });
    order_mock.verify();
}
