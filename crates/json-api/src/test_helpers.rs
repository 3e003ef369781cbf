//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use orderdesk_app::{
    context::AppContext,
    domain::{
        customers::{
            MockCustomersService,
            records::{CustomerId, CustomerRecord},
        },
        order_items::{
            MockOrderItemsService,
            records::{OrderItemId, OrderItemRecord},
        },
        orders::{
            MockOrdersService,
            enums::{OrderStatus, ShippingMethod},
            records::{OrderId, OrderRecord},
        },
        products::{
            MockProductsService,
            records::{ProductId, ProductRecord},
        },
    },
};

use crate::state::State;

pub(crate) fn make_customer(id: CustomerId) -> CustomerRecord {
    CustomerRecord {
        id,
        name: "Zoe".to_owned(),
        email: "zoe@example.com".to_owned(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_product(id: ProductId) -> ProductRecord {
    ProductRecord {
        id,
        sku: "SKU123".to_owned(),
        name: "Test Product".to_owned(),
        unit_price: Decimal::new(1999, 2),
        stock_level: 0,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order(id: OrderId) -> OrderRecord {
    OrderRecord {
        id,
        number: "ORD123".to_owned(),
        date_and_time: Timestamp::UNIX_EPOCH,
        customer_id: CustomerId::new(),
        customer_name: "Zoe".to_owned(),
        shipping_method: ShippingMethod::Express,
        shipping_cost: Decimal::new(500, 2),
        status: OrderStatus::Pending,
        items: vec![],
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_order_item(
    id: OrderItemId,
    order: OrderId,
    product: ProductId,
) -> OrderItemRecord {
    OrderItemRecord {
        id,
        order_id: order,
        product_id: product,
        product_name: "Test Product".to_owned(),
        product_sku: "SKU123".to_owned(),
        quantity: 2,
        unit_price: Decimal::new(1999, 2),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// App context with one live mock; the other services are strict mocks
/// that panic on any call.
pub(crate) fn app_with_customers(customers: MockCustomersService) -> AppContext {
    AppContext {
        customers: Arc::new(customers),
        products: Arc::new(MockProductsService::new()),
        orders: Arc::new(MockOrdersService::new()),
        order_items: Arc::new(MockOrderItemsService::new()),
    }
}

pub(crate) fn app_with_products(products: MockProductsService) -> AppContext {
    AppContext {
        customers: Arc::new(MockCustomersService::new()),
        products: Arc::new(products),
        orders: Arc::new(MockOrdersService::new()),
        order_items: Arc::new(MockOrderItemsService::new()),
    }
}

pub(crate) fn app_with_orders(orders: MockOrdersService) -> AppContext {
    AppContext {
        customers: Arc::new(MockCustomersService::new()),
        products: Arc::new(MockProductsService::new()),
        orders: Arc::new(orders),
        order_items: Arc::new(MockOrderItemsService::new()),
    }
}

pub(crate) fn app_with_order_items(order_items: MockOrderItemsService) -> AppContext {
    AppContext {
        customers: Arc::new(MockCustomersService::new()),
        products: Arc::new(MockProductsService::new()),
        orders: Arc::new(MockOrdersService::new()),
        order_items: Arc::new(order_items),
    }
}

fn service_over(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    service_over(app_with_customers(customers), route)
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service_over(app_with_products(products), route)
}

pub(crate) fn orders_service(orders: MockOrdersService, route: Router) -> Service {
    service_over(app_with_orders(orders), route)
}

pub(crate) fn order_items_service(order_items: MockOrderItemsService, route: Router) -> Service {
    service_over(app_with_order_items(order_items), route)
}
