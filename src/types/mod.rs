mod address;
mod call_result;
mod comptroller_types;
mod ctoken_types;
mod event_log;
mod event_meta;
mod rpc_response;

pub use self::{
    call_result::CallResult,
    comptroller_types::{
        MarketListed_Type, NewCollateralFactor_Type,
        NewLiquidationIncentive_Type, NewPriceOracle_Type,
    },
    ctoken_types::{
        AccrueInterest_Type, Borrow_Type, LiquidateBorrow_Type, Mint_Type,
        NewReserveFactor_Type, Redeem_Type, RepayBorrow_Type,
    },
    event_log::{Event_Log, Protocol_Event},
    event_meta::EventMeta,
    rpc_response::{RpcErrorBody, RpcResponse},
};
