packhub_kernel::views! {
    /// Paginated box list with state filters.
    pub BoxList => "packing/BoxList";
    pub BoxForm => "packing/BoxForm";
    pub BoxDetail => "packing/BoxDetail";
    /// Paginated pallet list, open and closed.
    pub PalletList => "packing/PalletList";
    /// Pallet creation; stamps the generated pallet code.
    pub PalletForm => "packing/PalletForm";
    pub PalletDetail => "packing/PalletDetail";
    /// Drag-and-drop pallet board (v2 UI).
    pub PalletBoard => "packing/PalletBoard";
}
