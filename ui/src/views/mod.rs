mod home;
pub use home::Home;

mod asset_management;
pub use asset_management::AssetManagement;

mod investment_banking;
pub use investment_banking::InvestmentBanking;

mod international_markets;
pub use international_markets::InternationalMarkets;

mod margin_lending;
pub use margin_lending::MarginLending;
