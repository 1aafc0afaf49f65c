use super::common::{
    BetOutcome, BetStatus, BetTargetType, GroupBy, OrderBy, OrderProjection, OrderStatus,
    OrderType, PersistenceType, PriceSize, Side, SortDir, TimeInForce, TimeRange,
};
use crate::error::BetfairError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order kinds
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitOrder {
    #[serde(with = "super::decimal_serde")]
    pub size: Decimal,
    #[serde(with = "super::decimal_serde")]
    pub price: Decimal,
    pub persistence_type: PersistenceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub min_fill_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_target_type: Option<BetTargetType>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub bet_target_size: Option<Decimal>,
}

impl LimitOrder {
    pub fn new(size: Decimal, price: Decimal, persistence_type: PersistenceType) -> Self {
        Self {
            size,
            price,
            persistence_type,
            time_in_force: None,
            min_fill_size: None,
            bet_target_type: None,
            bet_target_size: None,
        }
    }

    /// Fill-or-kill with an optional minimum fill.
    pub fn fill_or_kill(mut self, min_fill_size: Option<Decimal>) -> Self {
        self.time_in_force = Some(TimeInForce::FillOrKill);
        self.min_fill_size = min_fill_size;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LimitOnCloseOrder {
    #[serde(with = "super::decimal_serde")]
    pub liability: Decimal,
    #[serde(with = "super::decimal_serde")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketOnCloseOrder {
    #[serde(with = "super::decimal_serde")]
    pub liability: Decimal,
}

/// The order payload of a place instruction. The variant decides both the
/// `orderType` value and which payload field goes on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderKind {
    Limit(LimitOrder),
    LimitOnClose(LimitOnCloseOrder),
    MarketOnClose(MarketOnCloseOrder),
}

impl OrderKind {
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderKind::Limit(_) => OrderType::Limit,
            OrderKind::LimitOnClose(_) => OrderType::LimitOnClose,
            OrderKind::MarketOnClose(_) => OrderType::MarketOnClose,
        }
    }
}

// ============================================================================
// Instructions
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(into = "PlaceInstructionWire", try_from = "PlaceInstructionWire")]
pub struct PlaceInstruction {
    pub selection_id: i64,
    pub side: Side,
    pub handicap: Decimal,
    pub order: OrderKind,
    pub customer_order_ref: Option<String>,
}

impl PlaceInstruction {
    pub fn new(selection_id: i64, side: Side, order: OrderKind) -> Self {
        Self {
            selection_id,
            side,
            handicap: Decimal::ZERO,
            order,
            customer_order_ref: None,
        }
    }

    pub fn limit(
        selection_id: i64,
        side: Side,
        size: Decimal,
        price: Decimal,
        persistence_type: PersistenceType,
    ) -> Self {
        Self::new(
            selection_id,
            side,
            OrderKind::Limit(LimitOrder::new(size, price, persistence_type)),
        )
    }

    pub fn limit_on_close(selection_id: i64, side: Side, liability: Decimal, price: Decimal) -> Self {
        Self::new(
            selection_id,
            side,
            OrderKind::LimitOnClose(LimitOnCloseOrder { liability, price }),
        )
    }

    pub fn market_on_close(selection_id: i64, side: Side, liability: Decimal) -> Self {
        Self::new(
            selection_id,
            side,
            OrderKind::MarketOnClose(MarketOnCloseOrder { liability }),
        )
    }

    pub fn with_handicap(mut self, handicap: Decimal) -> Self {
        self.handicap = handicap;
        self
    }

    pub fn with_customer_order_ref(mut self, customer_order_ref: impl Into<String>) -> Self {
        self.customer_order_ref = Some(customer_order_ref.into());
        self
    }

    pub fn order_type(&self) -> OrderType {
        self.order.order_type()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceInstructionWire {
    order_type: OrderType,
    selection_id: i64,
    #[serde(default, with = "super::decimal_serde::option")]
    handicap: Option<Decimal>,
    side: Side,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit_order: Option<LimitOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit_on_close_order: Option<LimitOnCloseOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    market_on_close_order: Option<MarketOnCloseOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer_order_ref: Option<String>,
}

impl From<PlaceInstruction> for PlaceInstructionWire {
    fn from(instruction: PlaceInstruction) -> Self {
        let order_type = instruction.order_type();
        let mut wire = PlaceInstructionWire {
            order_type,
            selection_id: instruction.selection_id,
            handicap: Some(instruction.handicap),
            side: instruction.side,
            limit_order: None,
            limit_on_close_order: None,
            market_on_close_order: None,
            customer_order_ref: instruction.customer_order_ref,
        };
        match instruction.order {
            OrderKind::Limit(order) => wire.limit_order = Some(order),
            OrderKind::LimitOnClose(order) => wire.limit_on_close_order = Some(order),
            OrderKind::MarketOnClose(order) => wire.market_on_close_order = Some(order),
        }
        wire
    }
}

impl TryFrom<PlaceInstructionWire> for PlaceInstruction {
    type Error = BetfairError;

    fn try_from(wire: PlaceInstructionWire) -> Result<Self, Self::Error> {
        let order = match (
            wire.order_type,
            wire.limit_order,
            wire.limit_on_close_order,
            wire.market_on_close_order,
        ) {
            (OrderType::Limit, Some(order), None, None) => OrderKind::Limit(order),
            (OrderType::LimitOnClose, None, Some(order), None) => OrderKind::LimitOnClose(order),
            (OrderType::MarketOnClose, None, None, Some(order)) => OrderKind::MarketOnClose(order),
            (order_type, ..) => {
                return Err(BetfairError::InvalidInstruction(format!(
                    "orderType {order_type:?} does not match the order payload"
                )))
            }
        };

        Ok(PlaceInstruction {
            selection_id: wire.selection_id,
            side: wire.side,
            handicap: wire.handicap.unwrap_or(Decimal::ZERO),
            order,
            customer_order_ref: wire.customer_order_ref,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelInstruction {
    pub bet_id: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_reduction: Option<Decimal>,
}

impl CancelInstruction {
    /// Cancel the whole unmatched remainder of a bet.
    pub fn new(bet_id: impl Into<String>) -> Self {
        Self {
            bet_id: bet_id.into(),
            size_reduction: None,
        }
    }

    /// Cancel only `size_reduction` of the unmatched remainder.
    pub fn reduce(bet_id: impl Into<String>, size_reduction: Decimal) -> Self {
        Self {
            bet_id: bet_id.into(),
            size_reduction: Some(size_reduction),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceInstruction {
    pub bet_id: String,
    #[serde(with = "super::decimal_serde")]
    pub new_price: Decimal,
}

impl ReplaceInstruction {
    pub fn new(bet_id: impl Into<String>, new_price: Decimal) -> Self {
        Self {
            bet_id: bet_id.into(),
            new_price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstruction {
    pub bet_id: String,
    pub new_persistence_type: PersistenceType,
}

impl UpdateInstruction {
    pub fn new(bet_id: impl Into<String>, new_persistence_type: PersistenceType) -> Self {
        Self {
            bet_id: bet_id.into(),
            new_persistence_type,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<PlaceInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_version: Option<MarketVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_ref: Option<String>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_placement: Option<bool>,
}

impl PlaceOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<PlaceInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
            market_version: None,
            customer_strategy_ref: None,
            async_placement: None,
        }
    }

    pub fn with_customer_ref(mut self, customer_ref: impl Into<String>) -> Self {
        self.customer_ref = Some(customer_ref.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketVersion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

/// Leaving both `market_id` and `instructions` empty cancels every unmatched
/// bet on the account.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<CancelInstruction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

impl CancelOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<CancelInstruction>) -> Self {
        Self {
            market_id: Some(market_id.into()),
            instructions: Some(instructions),
            customer_ref: None,
        }
    }

    /// Cancel every unmatched bet in one market.
    pub fn market(market_id: impl Into<String>) -> Self {
        Self {
            market_id: Some(market_id.into()),
            ..Default::default()
        }
    }

    pub fn all() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<ReplaceInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_version: Option<MarketVersion>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub async_placement: Option<bool>,
}

impl ReplaceOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<ReplaceInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
            market_version: None,
            async_placement: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrdersRequest {
    pub market_id: String,
    pub instructions: Vec<UpdateInstruction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

impl UpdateOrdersRequest {
    pub fn new(market_id: impl Into<String>, instructions: Vec<UpdateInstruction>) -> Self {
        Self {
            market_id: market_id.into(),
            instructions,
            customer_ref: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListCurrentOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_projection: Option<OrderProjection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<OrderBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<SortDir>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_record: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClearedOrdersRequest {
    pub bet_status: BetStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_refs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_date_range: Option<TimeRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_item_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_record: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_count: Option<i32>,
}

impl ListClearedOrdersRequest {
    pub fn new(bet_status: BetStatus) -> Self {
        Self {
            bet_status,
            event_type_ids: None,
            event_ids: None,
            market_ids: None,
            runner_ids: None,
            bet_ids: None,
            customer_order_refs: None,
            customer_strategy_refs: None,
            side: None,
            settled_date_range: None,
            group_by: None,
            include_item_description: None,
            locale: None,
            from_record: None,
            record_count: None,
        }
    }
}

// ============================================================================
// Responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrdersResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_reports: Option<Vec<PlaceInstructionReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceInstructionReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    pub instruction: PlaceInstruction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_date: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub average_price_matched: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_matched: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrdersResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_reports: Option<Vec<CancelInstructionReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelInstructionReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub instruction: CancelInstruction,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_cancelled: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOrdersResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_reports: Option<Vec<ReplaceInstructionReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceInstructionReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_instruction_report: Option<CancelInstructionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_instruction_report: Option<PlaceInstructionReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrdersResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction_reports: Option<Vec<UpdateInstructionReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstructionReport {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    pub instruction: UpdateInstruction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCurrentOrdersResponse {
    pub current_orders: Vec<CurrentOrderSummary>,
    pub more_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentOrderSummary {
    pub bet_id: String,
    pub market_id: String,
    pub selection_id: i64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub handicap: Option<Decimal>,
    pub price_size: PriceSize,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub bsp_liability: Option<Decimal>,
    pub side: Side,
    pub status: OrderStatus,
    pub persistence_type: PersistenceType,
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_date: Option<DateTime<Utc>>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub average_price_matched: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_matched: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_remaining: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_lapsed: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_cancelled: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_voided: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regulator_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClearedOrdersResponse {
    pub cleared_orders: Vec<ClearedOrderSummary>,
    pub more_available: bool,
}

impl ListClearedOrdersResponse {
    /// Sum of `profit` over this page. Orders without a profit count as zero.
    pub fn total_profit(&self) -> Decimal {
        self.cleared_orders
            .iter()
            .filter_map(|order| order.profit)
            .sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearedOrderSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence_type: Option<PersistenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_description: Option<ItemDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_outcome: Option<BetOutcome>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub price_requested: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_matched_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_count: Option<i32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub commission: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub price_matched: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_reduced: Option<bool>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_settled: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub profit: Option<Decimal>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub size_cancelled: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_order_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_strategy_ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_winners: Option<i32>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "super::decimal_serde::option")]
    pub each_way_divisor: Option<Decimal>,
}
