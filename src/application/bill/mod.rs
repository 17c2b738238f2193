pub mod get_bill;
pub mod load_bills;

pub use get_bill::{BillLineDto, BillTotalDto, GetBillResponse, GetBillUseCase};
pub use load_bills::LoadBillsUseCase;
