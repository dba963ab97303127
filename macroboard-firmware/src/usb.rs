// USB Device Setup: HID Boot-Keyboard über embassy-usb
//
// Alle Buffer müssen 'static sein, weil UsbDevice und HidWriter
// in eigenen Embassy Tasks weiterleben.

use defmt::info;
use embassy_usb::class::hid::{Config as HidConfig, HidBootProtocol, HidSubclass, HidWriter, State};
use embassy_usb::{Builder, Config as UsbConfig};
use static_cell::StaticCell;
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};

use crate::config::{
    HID_MAX_PACKET_SIZE, HID_POLL_MS, USB_BOS_DESCRIPTOR_SIZE, USB_CONFIG_DESCRIPTOR_SIZE,
    USB_CONTROL_BUFFER_SIZE, USB_MANUFACTURER, USB_MAX_POWER_MA, USB_MSOS_DESCRIPTOR_SIZE,
    USB_PID, USB_PRODUCT, USB_SERIAL_NUMBER, USB_VID,
};
use crate::{KeyboardHidWriter, MacroboardUsbDevice, UsbDriver};

/// Descriptor- und Control-Buffer für embassy-usb
struct UsbBuffers {
    config_descriptor: [u8; USB_CONFIG_DESCRIPTOR_SIZE],
    bos_descriptor: [u8; USB_BOS_DESCRIPTOR_SIZE],
    msos_descriptor: [u8; USB_MSOS_DESCRIPTOR_SIZE],
    control: [u8; USB_CONTROL_BUFFER_SIZE],
}

impl UsbBuffers {
    const fn new() -> Self {
        Self {
            config_descriptor: [0; USB_CONFIG_DESCRIPTOR_SIZE],
            bos_descriptor: [0; USB_BOS_DESCRIPTOR_SIZE],
            msos_descriptor: [0; USB_MSOS_DESCRIPTOR_SIZE],
            control: [0; USB_CONTROL_BUFFER_SIZE],
        }
    }
}

/// Device-Descriptor: einfaches HID-Gerät ohne IADs
fn device_config() -> UsbConfig<'static> {
    let mut config = UsbConfig::new(USB_VID, USB_PID);
    config.manufacturer = Some(USB_MANUFACTURER);
    config.product = Some(USB_PRODUCT);
    config.serial_number = Some(USB_SERIAL_NUMBER);
    config.max_power = USB_MAX_POWER_MA;
    config.max_packet_size_0 = 64;
    config
}

/// Baut das USB-Gerät mit einem HID Boot-Keyboard Interface
///
/// Darf nur einmal aufgerufen werden (StaticCells).
pub fn build_usb(driver: UsbDriver) -> (MacroboardUsbDevice, KeyboardHidWriter) {
    static BUFFERS: StaticCell<UsbBuffers> = StaticCell::new();
    static HID_STATE: StaticCell<State<'static>> = StaticCell::new();

    let buffers = BUFFERS.init(UsbBuffers::new());

    let mut builder = Builder::new(
        driver,
        device_config(),
        &mut buffers.config_descriptor,
        &mut buffers.bos_descriptor,
        &mut buffers.msos_descriptor,
        &mut buffers.control,
    );

    let hid_config = HidConfig {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: HID_POLL_MS,
        max_packet_size: HID_MAX_PACKET_SIZE,
        hid_subclass: HidSubclass::Boot,
        hid_boot_protocol: HidBootProtocol::Keyboard,
    };
    let writer = HidWriter::new(&mut builder, HID_STATE.init(State::new()), hid_config);

    info!("USB HID keyboard {=u16:x}:{=u16:x} configured", USB_VID, USB_PID);
    (builder.build(), writer)
}
