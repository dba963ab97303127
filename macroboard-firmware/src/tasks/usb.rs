// USB Task - beantwortet Control-Requests des Hosts
use defmt::info;

use crate::MacroboardUsbDevice;

/// USB Device Task
///
/// Muss dauerhaft laufen, sonst wird das Gerät nie enumeriert.
#[embassy_executor::task]
pub async fn usb_task(mut usb: MacroboardUsbDevice) {
    info!("USB device task started");
    usb.run().await;
}
