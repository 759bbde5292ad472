mod healthcheck;
mod qr;
mod share_link;
mod vcard;
