//! Bindings for the contracts the scripts touch

use alloy::sol;

sol! {
    #[sol(rpc)]
    contract IEulerMaxVault {
        function owner() external view returns (address);
        function asset() external view returns (address);
        function euler() external view returns (address);
        function eulerSwap() external view returns (address);
        function totalShares() external view returns (uint256);
        function totalSupplied() external view returns (uint256);
        function vaultAPY() external view returns (uint256);
    }

    #[sol(rpc)]
    contract IERC20 {
        function decimals() external view returns (uint8);
        function symbol() external view returns (string);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}
