//! ABI bindings for the contracts the proxy talks to

use alloy::sol;

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    /// The EulerMax vault, supplies deposited assets to an Euler lending vault
    contract IEulerMaxVault {
        function owner() external view returns (address);
        function asset() external view returns (address);
        function euler() external view returns (address);
        function eulerSwap() external view returns (address);
        function totalShares() external view returns (uint256);
        function totalSupplied() external view returns (uint256);
        function vaultAPY() external view returns (uint256);

        function deposit(uint256 amount) external;
        function withdraw(uint256 shares) external;
    }
}

sol! {
    #[sol(rpc)]
    #[derive(Debug)]
    /// The subset of ERC20 the proxy reads
    contract IERC20 {
        function decimals() external view returns (uint8);
        function balanceOf(address account) external view returns (uint256);
        function approve(address spender, uint256 value) external returns (bool);
    }
}
